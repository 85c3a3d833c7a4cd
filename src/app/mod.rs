// Application layer: the concrete scenarios each binary runs.

pub mod scenarios;
