// Application layer: wires configuration, storage and the engine for each command.

pub mod commands;
