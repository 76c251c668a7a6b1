// .............
// ....##.##....
// ...#..#..#...
// ...#.....#...
// ....#...#....
// .....#.#.....
// ......#......
// .............
pub const WORDS: [u32; 4] = [0x20360000, 0x11010409, 0x00100140, 0x00000000];
