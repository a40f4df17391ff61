use {
  super::*,
  crate::frame::CellKind,
  euclid::Vector2D,
  rand::prelude::*,
  std::collections::BTreeSet
};

fn cell_set(p0: Cell, p1: Cell) -> BTreeSet<(i32, i32)> {
  line_cells(p0, p1).map(|c| (c.x, c.y)).collect()
}

#[test] fn symmetric() {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  for _ in 0..2000 {
    let a = Cell::new(rng.gen_range(-40..40), rng.gen_range(-40..40));
    let b = Cell::new(rng.gen_range(-40..40), rng.gen_range(-40..40));
    assert_eq!(cell_set(a, b), cell_set(b, a), "{:?} -> {:?}", a, b);
  }
}

#[test] fn single_point() {
  let p = Cell::new(5, -3);
  assert_eq!(line_cells(p, p).collect::<Vec<_>>(), vec![p]);
}

#[test] fn endpoints_inclusive_and_connected() {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
  for _ in 0..500 {
    let a = Cell::new(rng.gen_range(-20..20), rng.gen_range(-20..20));
    let b = Cell::new(rng.gen_range(-20..20), rng.gen_range(-20..20));
    let cells = line_cells(a, b).collect::<Vec<_>>();
    assert!(cells.contains(&a) && cells.contains(&b));
    let expected = (b.x - a.x).abs().max((b.y - a.y).abs()) as usize + 1;
    assert_eq!(cells.len(), expected);
    cells.windows(2).for_each(|w| {
      let step = w[1] - w[0];
      assert!(step.x.abs() <= 1 && step.y.abs() <= 1 && step != Vector2D::zero());
    });
  }
}

#[test] fn shallow_line() {
  let cells = line_cells(Cell::new(0, 0), Cell::new(4, 2))
    .map(|c| (c.x, c.y))
    .collect::<Vec<_>>();
  assert_eq!(cells, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
}

#[test] fn clipped_line_keeps_visible_part() {
  let mut frame = Frame::new(10, 10, CellKind::Pixel);
  let landed = draw_line(&mut frame, Cell::new(-5, 5), Cell::new(20, 5), 3);
  assert_eq!(landed, 10);
  assert!(frame.rows().nth(5).unwrap().iter().all(|&c| c == 3));
  assert_eq!(frame.cells().iter().filter(|&&c| c == 3).count(), 10);
}

#[test] fn closed_polyline() {
  let mut frame = Frame::new(8, 8, CellKind::Pixel);
  let square = [Cell::new(1, 1), Cell::new(6, 1), Cell::new(6, 6), Cell::new(1, 6)];
  draw_polyline(&mut frame, &square, true, 1);
  // perimeter of a 6×6 square
  assert_eq!(frame.cells().iter().filter(|&&c| c == 1).count(), 20);
  assert_eq!(frame.get(Cell::new(3, 3)), Some(0));
}

#[test] fn cube_wireframe() {
  let mut frame = Frame::new(40, 40, CellKind::Pixel);
  let projection = Projection {
    distance: 4.0,
    scale: 8.0,
    offset: Vector2D::new(20.0, 20.0),
    window: None
  };
  draw_wireframe(&mut frame, &Model::cube(), Spin::default(), &projection, 1);
  // front face (z = 1) is smaller than the back face, both are squares around the center
  assert_eq!(frame.get(Cell::new(20, 20)), Some(0));
  assert_eq!(frame.get(Cell::new(16, 20)), Some(0));
  assert_eq!(frame.get(Cell::new(9, 20)), Some(1));
  assert_eq!(frame.get(Cell::new(11, 11)), Some(1));
  assert_eq!(frame.get(Cell::new(26, 26)), Some(1));
}
