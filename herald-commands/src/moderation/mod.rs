pub mod acknowledgement;
pub mod ban;
pub mod kick;
pub mod unban;
