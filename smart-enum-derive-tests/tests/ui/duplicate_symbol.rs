use smart_enum::smart_enum;

#[smart_enum]
enum Animal {
    Dog = 1,
    Dog = 2,
}

fn main() {}
