pub const WORDS: [u32; 4] = [0x1f88effe, 0xe0ee03f0, 0x80ee0e38, 0x0000000f];
