pub mod booking_draft;
pub mod lead;
