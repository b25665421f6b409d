pub mod booking_draft_repo;
pub mod lead_repo;

pub use booking_draft_repo::BookingDraftRepo;
pub use lead_repo::LeadRepo;
