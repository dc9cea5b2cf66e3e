pub mod account_form;
pub mod account_loader;
pub mod claim_phase;
pub mod username_claim;
