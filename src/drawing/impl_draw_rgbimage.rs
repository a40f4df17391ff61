use {
  crate::{
    drawing::{Draw, Preview},
    geometry::Cell
  },
  image::{Rgb, RgbImage}
};

impl Draw<RgbImage> for Preview<'_> {
  /// Cells outside `image` are clipped.
  fn draw(&self, image: &mut RgbImage) {
    let side = self.cell_pixels();
    let fallback = self.palette[0];
    itertools::iproduct!(0..self.frame.height(), 0..self.frame.width())
      .for_each(|(y, x)| {
        let index = self.frame.get(Cell::new(x as i32, y as i32)).unwrap_or(0);
        let color = Rgb(*self.palette.get(index as usize).unwrap_or(&fallback));
        let (x0, y0) = (x * side, y * side);
        itertools::iproduct!(y0..(y0 + side).min(image.height()), x0..(x0 + side).min(image.width()))
          .for_each(|(py, px)| image.put_pixel(px, py, color));
      });
  }
}
