use smart_enum::smart_enum;

#[smart_enum(bogus = 1)]
enum Animal {
    Dog = 1,
}

fn main() {}
