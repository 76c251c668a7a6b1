pub const WORDS: [u32; 4] = [0x1f88ffff, 0xe0fe03f0, 0xffeffe3f, 0x000000ff];
