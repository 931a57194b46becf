//! Repositories for the country, city and airport reference tables.

pub mod airport;
pub mod city;
pub mod country;
