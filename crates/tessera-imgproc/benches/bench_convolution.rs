use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tessera_image::Image;
use tessera_imgproc::filter::{filter_2d, Kernel};

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter2d");

    for (width, height) in [(256usize, 224usize), (512, 448), (768, 512)].iter() {
        for kernel_size in [3usize, 5, 7, 9].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            let image_data = (0..width * height * 4).map(|i| (i % 256) as u8).collect();
            let image = Image::<u8, 4>::new([*width, *height].into(), image_data).unwrap();

            let kernel = Kernel::new(*kernel_size).unwrap();

            group.bench_with_input(
                BenchmarkId::new("filter_2d", &parameter_string),
                &(&image, &kernel),
                |b, i| {
                    let (src, kernel) = (i.0, i.1);
                    b.iter(|| black_box(filter_2d(src, kernel)).unwrap());
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_convolution);
criterion_main!(benches);
