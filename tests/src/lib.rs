#![cfg(test)]

mod discovery;
mod fixtures;
