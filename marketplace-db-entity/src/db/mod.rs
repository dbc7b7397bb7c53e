pub mod affiliate;
pub mod agent;
pub mod agent_commission_split;
pub mod commission;
pub mod commission_rate;
pub mod onboarding_link;
pub mod partner_review;
