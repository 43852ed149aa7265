pub mod asrs;
pub mod gad7;
pub mod oci;
pub mod phq9;
pub mod pss;
