use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use crumb_matcher::{IncrementalMatcher, rank};

fn haystacks() -> Vec<String> {
	let words = ["insert", "table", "todo", "bold", "italic", "heading", "date", "time", "link", "image"];
	(0..10_000)
		.map(|i| format!("{}-{}-{i}", words[i % words.len()], words[(i / 7) % words.len()]))
		.collect()
}

fn bench_rank(c: &mut Criterion) {
	let names = haystacks();
	c.bench_function("rank/10k/short", |b| b.iter(|| rank(black_box(names.as_slice()), black_box("ta"))));
	c.bench_function("rank/10k/long", |b| b.iter(|| rank(black_box(names.as_slice()), black_box("table-ti"))));
}

fn bench_incremental(c: &mut Criterion) {
	let names = haystacks();
	c.bench_function("incremental/10k/typing", |b| {
		b.iter(|| {
			let mut matcher = IncrementalMatcher::new(&names);
			for needle in ["t", "ta", "tab", "tabl", "table"] {
				black_box(matcher.match_needle(needle).len());
			}
		})
	});
}

criterion_group!(benches, bench_rank, bench_incremental);
criterion_main!(benches);
