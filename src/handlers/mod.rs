// src/handlers/mod.rs

pub mod simulado;
