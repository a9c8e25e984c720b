pub mod oref;
