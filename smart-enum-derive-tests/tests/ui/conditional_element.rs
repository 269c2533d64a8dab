use smart_enum::smart_enum;

#[smart_enum]
enum Platform {
    #[cfg(unix)]
    Unix = 1,
}

fn main() {}
