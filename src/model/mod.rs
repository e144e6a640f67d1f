// Core data model for buffered sample streams.

mod sample;

pub use sample::Sample;
