//! API Routes

pub mod admin;
pub mod billing;
pub mod bookings;
pub mod business;
pub mod faqs;
pub mod health;
pub mod insights;
pub mod leads;
pub mod staff;
