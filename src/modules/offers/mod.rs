pub mod controller;
pub mod router;
pub mod service;
pub mod template;

pub use router::init_offers_router;
pub use service::OfferService;
