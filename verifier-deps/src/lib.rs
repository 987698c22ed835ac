//! Pins `solana-program` for verifiable builds. No code.
