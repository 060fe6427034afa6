// Domain layer: measurements, packages and stacks. No I/O.

pub mod model;
