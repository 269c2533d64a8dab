use smart_enum::smart_enum;

#[smart_enum]
enum Lookup {
    TABLE = 1,
}

fn main() {}
