// Service module exports

pub mod imposition;
pub mod pdf;
pub mod plan;
