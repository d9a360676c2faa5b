use crate::*;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack any supported layout into 0xAARRGGBB words for a window framebuffer.
pub fn image_to_u32(image: &Image) -> Vec<u32> {
    let bpp = image.format.bytes_per_pixel();
    let [r, g, b] = image.format.rgb_offsets();
    let mut buf = Vec::with_capacity(image.size.area());
    for pixel in image.data.chunks_exact(bpp) {
        buf.push(pack_u32(pixel[r], pixel[g], pixel[b]));
    }
    buf
}
