use smart_enum::smart_enum;

#[smart_enum]
struct Animal(i32);

fn main() {}
