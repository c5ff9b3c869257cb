pub mod reason_interactions;
