use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keywrap_symmetric::{CipherContext, Direction, VARIANTS};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn bench_session_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("session-wrap");
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for size in [16usize, 32, 64, 256].iter() {
        let mut key = vec![0u8; *size];
        rng.fill_bytes(&mut key);
        group.throughput(Throughput::Bytes(*size as u64));

        for v in VARIANTS.iter() {
            let mut kek = vec![0u8; v.key_len()];
            rng.fill_bytes(&mut kek);

            group.bench_with_input(BenchmarkId::new(v.name, size), size, |b, _| {
                let mut out = vec![0u8; key.len() + 8];
                b.iter(|| {
                    let mut session = v.new_session(Direction::Encrypt);
                    session.encrypt_init(Some(&kek), None).unwrap();
                    session.process(&key, &mut out).unwrap()
                });
            });
        }
    }
    group.finish();
}

fn bench_session_unwrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("session-unwrap");
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for v in VARIANTS.iter() {
        let mut kek = vec![0u8; v.key_len()];
        let mut key = [0u8; 32];
        rng.fill_bytes(&mut kek);
        rng.fill_bytes(&mut key);
        let wrapped = v.wrap_key(&kek, None, &key).unwrap();

        // One session, re-initialised per message
        let mut session = v.new_session(Direction::Decrypt);
        session.decrypt_init(Some(&kek), None).unwrap();
        let mut out = vec![0u8; session.output_size(wrapped.len()).unwrap()];

        group.bench_function(v.name, |b| {
            b.iter(|| {
                session.decrypt_init(None, None).unwrap();
                session.process(&wrapped, &mut out).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_session_wrap, bench_session_unwrap);
criterion_main!(benches);
