use blob_contacts::*;

const BLOB_COUNT: usize = 8;
const RANGE: f32 = 100.0;

fn main() {
    let margin = 0.95;
    let edge = RANGE * margin;

    // Bordered box plus three slanted platforms.
    let segments = [
        ((-50.0, 0.0), (20.0, -10.0), 0.6),
        ((-edge, -edge), (edge, -edge), 1.0),
        ((-edge, edge), (edge, edge), 1.0),
        ((-edge, -edge), (-edge, edge), 1.0),
        ((edge, -edge), (edge, edge), 1.0),
        ((80.0, -40.0), (0.0, -70.0), 0.6),
        ((-20.0, -80.0), (-80.0, -50.0), 0.4),
    ];

    let mut pipeline = ContactPipeline::new();
    for (start, end, restitution) in segments {
        let platform = Platform::new(start.into(), end.into(), restitution)
            .expect("demo platforms are non-degenerate");
        pipeline.add_generator(platform);
    }
    pipeline.add_generator(PairwiseCollisions);

    // Row of blobs of growing radius, dropped near the top of the box.
    let particles: Vec<Particle> = (0..BLOB_COUNT)
        .map(|i| {
            Particle::new(
                Vec2::new(-90.0 + i as f32 * 20.0, 90.0),
                3.0 + i as f32,
            )
            .expect("demo blobs are valid")
        })
        .collect();

    let contacts = pipeline.collect_contacts(&particles, config::DEFAULT_CONTACT_CAPACITY);

    println!(
        "{} generators produced {} contacts for {} blobs",
        pipeline.len(),
        contacts.len(),
        particles.len()
    );
    for contact in &contacts {
        match contact.body_b {
            Some(other) => println!(
                "blob {} vs blob {}: penetration {:.3}, normal {:?}",
                contact.body_a.index(),
                other.index(),
                contact.penetration,
                contact.normal
            ),
            None => println!(
                "blob {} vs platform: penetration {:.3}, normal {:?}",
                contact.body_a.index(),
                contact.penetration,
                contact.normal
            ),
        }
    }
}
