use smart_enum::smart_enum;

#[smart_enum]
#[repr(C)]
enum Animal {
    Dog = 1,
}

fn main() {}
