mod tests {
    use image::Rgb;
    use nalgebra::Point2;
    use std::io::Cursor;
    use trajectory::Histories;

    use crate::canvas::fit_selection;
    use crate::error::RenderError;
    use crate::palette::color_for;
    use crate::render::render_static;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn histories(input: &str) -> Histories {
        Histories::from_reader(Cursor::new(input)).unwrap()
    }

    #[test]
    fn test_static_plot_draws_path_and_markers() {
        let h = histories(
            "Body1 0.0 0.0 0.0\n\
             Body1 5.0 0.0 0.0\n\
             Body1 10.0 10.0 0.0\n",
        );
        let selection = ["Body1"];
        let viewport = fit_selection(&h, &selection, 100).unwrap();

        let image = render_static(&h, &selection, 100).unwrap();

        // Start disc at the first sample, end cross at the last
        let (sx, sy) = viewport.project(Point2::new(0.0, 0.0));
        assert_eq!(*image.get_pixel(sx as u32, sy as u32), color_for(0));
        let (ex, ey) = viewport.project(Point2::new(10.0, 10.0));
        assert_eq!(*image.get_pixel(ex as u32, ey as u32), color_for(0));

        // Path interior is painted too
        let (mx, my) = viewport.project(Point2::new(2.5, 0.0));
        assert_eq!(*image.get_pixel(mx as u32, my as u32), color_for(0));

        // Corners stay background
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        assert_eq!(*image.get_pixel(99, 99), WHITE);
    }

    #[test]
    fn test_each_body_gets_its_selection_color() {
        let h = histories(
            "A 0.0 0.0 0.0 B 0.0 10.0 0.0\n\
             A 10.0 0.0 0.0 B 10.0 10.0 0.0\n",
        );
        let selection = ["A", "B"];
        let viewport = fit_selection(&h, &selection, 100).unwrap();

        let image = render_static(&h, &selection, 100).unwrap();

        let (ax, ay) = viewport.project(Point2::new(5.0, 0.0));
        assert_eq!(*image.get_pixel(ax as u32, ay as u32), color_for(0));
        let (bx, by) = viewport.project(Point2::new(5.0, 10.0));
        assert_eq!(*image.get_pixel(bx as u32, by as u32), color_for(1));
    }

    #[test]
    fn test_empty_selection_is_no_data() {
        let h = histories("Body1 0.0 0.0 0.0\n");
        let err = render_static(&h, &[], 100).unwrap_err();
        assert!(matches!(err, RenderError::NoData));
    }
}
