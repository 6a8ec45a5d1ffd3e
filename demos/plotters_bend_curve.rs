extern crate plotters;
use plotters::prelude::*;

use bendcurve::{BendLayout, Curve, Vector3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a right turn with long legs and a direct S-shaped fallback
    let curves = [
        (
            Curve::new(
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(12.0, 10.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            RED,
        ),
        (
            Curve::new(
                Vector3::new(0.0, 2.0, 0.0),
                Vector3::new(8.0, 12.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            BLUE,
        ),
    ];

    let root = BitMapBackend::new("bend_curve.png", (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Curves between two rays", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-2f32..14f32, -2f32..14f32)?;

    chart.configure_mesh().draw()?;

    let nsteps: usize = 200;
    for (curve, color) in curves.iter() {
        let color = *color;
        let kind = match curve.layout() {
            BendLayout::Direct { .. } => "direct",
            BendLayout::ThreeSegment { .. } => "three segment",
        };

        let path: Vec<(f32, f32)> = (0..=nsteps)
            .map(|i| {
                let p = curve.position_at(i as f32 / nsteps as f32);
                (p.x, p.y)
            })
            .collect();

        chart
            .draw_series(LineSeries::new(path, &color))?
            .label(format!("{} (length {:.2})", kind, curve.length()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        // equal time steps: spacing shows the speed correction
        chart.draw_series(PointSeries::of_element(
            (0..=20).map(|i| {
                let p = curve.position_at(i as f32 / 20.0);
                (p.x, p.y)
            }),
            3,
            &color,
            &|coord, size, style| {
                EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled())
            },
        ))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("wrote bend_curve.png");
    Ok(())
}
