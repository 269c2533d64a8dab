#![deny(dead_code)]

use smart_enum::smart_enum;

#[smart_enum]
enum Mode {
    Read = 1,
    Write = 2,
}

fn main() {
    assert!(smart_enum::check(Mode::Read));
}
