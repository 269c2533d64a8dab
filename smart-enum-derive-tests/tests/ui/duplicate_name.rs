use smart_enum::smart_enum;

#[smart_enum]
enum Animal {
    #[smart_enum(name = "dog")]
    Dog = 1,
    #[smart_enum(name = "dog")]
    Wolf = 2,
}

fn main() {}
