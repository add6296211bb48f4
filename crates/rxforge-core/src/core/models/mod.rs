pub mod compound;
pub mod history;
pub mod trial;
