// Analysis API: HTTP surface over the fit-gap engine plus persistence of scored analyses.

pub mod handlers;
pub mod store;
