pub mod convert;
pub mod determinizer;
pub mod machine;
pub mod minimizer;
pub mod table;
