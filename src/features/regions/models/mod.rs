mod city;

pub use city::{City, Station, CITIES};
