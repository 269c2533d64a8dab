use smart_enum::smart_enum;

#[smart_enum]
enum Animal {
    #[smart_enum(label = "dog")]
    Dog = 1,
}

fn main() {}
