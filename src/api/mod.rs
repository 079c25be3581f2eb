// Start of file: /src/api/mod.rs

/*
* Re-export submodules for the HTTP feature endpoints.
*/

pub mod hello;

// End of file: /src/api/mod.rs
