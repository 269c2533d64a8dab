use smart_enum::smart_enum;

#[smart_enum]
enum Animal {
    Dog(u8),
    Cat = 2,
}

fn main() {}
