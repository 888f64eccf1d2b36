use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use xx_core::{assemble_str, hex_dump};

fn generate_source(lines: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut src = String::new();
    for i in 0..lines {
        match i % 5 {
            0 => src.push_str("# header comment\n"),
            1 => src.push_str(&format!("0y{:08b} \"text {i}\"\n", rng.gen::<u8>())),
            2 => src.push_str("/* block\n still block */ 0x41,0x42\n"),
            _ => {
                let row: Vec<String> = (0..16).map(|_| format!("{:02x}", rng.gen::<u8>())).collect();
                src.push_str(&row.join(" "));
                src.push_str(" ; trailing\n");
            }
        }
    }
    src
}

fn bench_assemble(c: &mut Criterion) {
    let src_100 = generate_source(100);
    let src_10k = generate_source(10_000);
    c.bench_function("assemble_100_lines", |b| {
        b.iter(|| black_box(assemble_str(black_box(&src_100)).unwrap()))
    });
    c.bench_function("assemble_10k_lines", |b| {
        b.iter(|| black_box(assemble_str(black_box(&src_10k)).unwrap()))
    });
}

fn bench_hex_dump(c: &mut Criterion) {
    let bytes: Vec<u8> = (0..64 * 1024).map(|i| (i % 256) as u8).collect();
    c.bench_function("hex_dump_64kb", |b| {
        b.iter(|| black_box(hex_dump(black_box(&bytes))))
    });
}

criterion_group!(benches, bench_assemble, bench_hex_dump);
criterion_main!(benches);
