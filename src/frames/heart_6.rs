pub const WORDS: [u32; 4] = [0x1f88ffff, 0xe0fe03f0, 0xf7effe3f, 0x0000007f];
