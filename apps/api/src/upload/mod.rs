// Input boundary: resume upload checks, required-field gate, PDF text extraction.

pub mod extract;
pub mod validation;
