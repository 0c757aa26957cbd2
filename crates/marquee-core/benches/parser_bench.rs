use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marquee_core::{generate_label, LabelFields, LanguageSeparator, ReleaseParser};

fn bench_release_parse(c: &mut Criterion) {
    let parser = ReleaseParser::with_defaults().unwrap();

    let inputs = vec![
        "Kung.Fu.Panda.4.2024.1080p.WEB-DL.Hindi-English.1.4GB.mkv",
        "The.Office.S02E05.720p.HDTV.x264-GROUP.mkv",
        "[@TamilBlasters] www.1TamilMV.Leo.HD.2023.Tamil.HQ.720p.mkv",
        "Show.Name.Season.02.Episode.05.Dual.Audio.480p.mp4",
        "Mirzapur.Episode.7.Hindi.480p.700MB.mp4",
    ];

    c.bench_function("release_parse_single", |b| {
        b.iter(|| parser.parse(black_box(inputs[0])).unwrap());
    });

    c.bench_function("release_parse_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = parser.parse(black_box(input)).unwrap();
            }
        });
    });

    c.bench_function("describe_and_label", |b| {
        b.iter(|| {
            let fields = parser.describe_link(
                black_box("https://cdn.example.com/dl/Show.S01E03.1080p.mkv"),
                black_box("Hindi 900MB"),
                Some(1),
                Some(3),
            );
            generate_label(&fields, LanguageSeparator::Plus)
        });
    });

    c.bench_function("label_only", |b| {
        let fields = LabelFields {
            season: Some(1),
            episode: Some(3),
            ..Default::default()
        };
        b.iter(|| generate_label(black_box(&fields), LanguageSeparator::Comma));
    });
}

criterion_group!(benches, bench_release_parse);
criterion_main!(benches);
