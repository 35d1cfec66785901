mod tests {
    use image::Rgb;
    use std::io::Cursor;
    use trajectory::Histories;

    use crate::animate::{frame_count, render_frame};
    use crate::canvas::fit_selection;
    use crate::palette::color_for;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    /// Body1 advances for 10 time steps, Body2 drops out after 5.
    fn two_body_histories() -> Histories {
        let mut input = String::new();
        for step in 0..10 {
            if step < 5 {
                input.push_str(&format!(
                    "Body1 {step}.0 0.0 0.0 Body2 {step}.0 10.0 0.0\n"
                ));
            } else {
                input.push_str(&format!("Body1 {step}.0 0.0 0.0\n"));
            }
        }
        Histories::from_reader(Cursor::new(input)).unwrap()
    }

    #[test]
    fn test_frame_count_is_longest_selected_history() {
        let histories = two_body_histories();
        assert_eq!(frame_count(&histories, &["Body1", "Body2"]), 10);
        assert_eq!(frame_count(&histories, &["Body2"]), 5);
        assert_eq!(frame_count(&histories, &[]), 0);
    }

    #[test]
    fn test_exhausted_body_freezes_at_final_sample() {
        let histories = two_body_histories();
        let selection = ["Body1", "Body2"];
        let viewport = fit_selection(&histories, &selection, 100).unwrap();

        let image = render_frame(&histories, &selection, viewport, 100, 7);

        // Body2 ran out at its 5th sample (4.0, 10.0); its head marker
        // stays frozen there
        let (x, y) = viewport.project(nalgebra::Point2::new(4.0, 10.0));
        assert_eq!(*image.get_pixel(x as u32, y as u32), color_for(1));

        // No sixth Body2 sample was ever invented
        let (x6, y6) = viewport.project(nalgebra::Point2::new(5.0, 10.0));
        assert_eq!(*image.get_pixel(x6 as u32, y6 as u32), WHITE);

        // Body1 is still advancing: its head sits at sample 8 of 10
        let (hx, hy) = viewport.project(nalgebra::Point2::new(7.0, 0.0));
        assert_eq!(*image.get_pixel(hx as u32, hy as u32), color_for(0));
    }

    #[test]
    fn test_first_frame_shows_one_sample_per_body() {
        let histories = two_body_histories();
        let selection = ["Body1", "Body2"];
        let viewport = fit_selection(&histories, &selection, 100).unwrap();

        let image = render_frame(&histories, &selection, viewport, 100, 0);

        let (x, y) = viewport.project(nalgebra::Point2::new(0.0, 0.0));
        assert_eq!(*image.get_pixel(x as u32, y as u32), color_for(0));

        // Nothing beyond the first sample is drawn yet
        let (fx, fy) = viewport.project(nalgebra::Point2::new(9.0, 0.0));
        assert_eq!(*image.get_pixel(fx as u32, fy as u32), WHITE);
    }

    #[test]
    fn test_last_frame_shows_complete_paths() {
        let histories = two_body_histories();
        let selection = ["Body1", "Body2"];
        let viewport = fit_selection(&histories, &selection, 100).unwrap();
        let frames = frame_count(&histories, &selection);

        let image = render_frame(&histories, &selection, viewport, 100, frames - 1);

        let (x, y) = viewport.project(nalgebra::Point2::new(9.0, 0.0));
        assert_eq!(*image.get_pixel(x as u32, y as u32), color_for(0));
    }
}
