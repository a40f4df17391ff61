use {
  super::*,
  crate::{
    frame::CellKind,
    palette::{Palette, COLODORE}
  },
  image::Rgb
};

fn checker() -> Frame {
  Frame::from_fn(2, 2, CellKind::Char, |x, y| ((x + y) % 2) as u8)
}

#[test] fn char_cells_become_blocks() {
  let palette = Palette::hardware(&COLODORE);
  let frame = checker();
  let image = Preview::new(&frame, &palette).render();
  assert_eq!(image.dimensions(), (16, 16));
  assert_eq!(*image.get_pixel(0, 0), Rgb([0, 0, 0]));
  assert_eq!(*image.get_pixel(7, 7), Rgb([0, 0, 0]));
  assert_eq!(*image.get_pixel(8, 0), Rgb([0xff, 0xff, 0xff]));
  assert_eq!(*image.get_pixel(15, 15), Rgb([0, 0, 0]));
}

#[test] fn scaled_pixels() {
  let palette = Palette::hardware(&COLODORE);
  let frame = Frame::from_fn(3, 1, CellKind::Pixel, |x, _| x as u8 + 1);
  let image = Preview::new(&frame, &palette).scale(2).render();
  assert_eq!(image.dimensions(), (6, 2));
  assert_eq!(*image.get_pixel(2, 1), Rgb(COLODORE.0[2]));
}

#[test] fn out_of_palette_index_falls_back() {
  let palette = Palette::new(vec![[1, 2, 3]]).unwrap();
  let frame = Frame::from_fn(1, 1, CellKind::Pixel, |_, _| 9);
  assert_eq!(*Preview::new(&frame, &palette).render().get_pixel(0, 0), Rgb([1, 2, 3]));
}

#[test] fn numbered_png_files() -> Result<()> {
  let dir = std::env::temp_dir().join(format!("c64-gfx-drawing-{}", std::process::id()));
  let palette = Palette::hardware(&COLODORE);
  let frames = vec![checker(); 3];
  let paths = save_frames(&dir, &frames, &palette, 1)?;
  assert_eq!(
    paths.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect::<Vec<_>>(),
    vec!["frame_0000.png", "frame_0001.png", "frame_0002.png"]
  );
  let image = image::open(&paths[2])?.to_rgb8();
  assert_eq!(image.dimensions(), (16, 16));
  std::fs::remove_dir_all(&dir)?;
  Ok(())
}
