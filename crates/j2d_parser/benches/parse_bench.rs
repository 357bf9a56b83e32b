use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use j2d_core::StringInterner;
use j2d_parser::parse_compilation_unit;

// A medium-size Java source exercising the supported statement forms.
const JAVA_SOURCE: &str = r#"
package bench;

import java.util.List;
import java.util.Map;

public class Inventory<K, V extends Comparable<V>> {
    private final Map<K, List<V>> items;
    private int count = 0, capacity;
    static final long LIMIT = 0xFFFFL;

    public Inventory(int capacity) {
        this.capacity = capacity;
    }

    public Inventory() {
        this(16);
    }

    public boolean add(K key, V value) {
        if (count >= capacity) {
            return false;
        } else if (value == null) {
            throw new IllegalArgumentException();
        }
        count++;
        return true;
    }

    int sum(int[] values) {
        int total = 0;
        for (int i = 0; i < values.length; i++) {
            total += values[i] << 1 >> 1;
        }
        for (int v : values) {
            total -= v % 3;
        }
        return total;
    }

    void classify(int code) {
        outer:
        while (true) {
            switch (code) {
                case 0:
                case 1:
                    code = code * 2 + 1;
                    break;
                default:
                    break outer;
            }
        }
        do {
            code--;
        } while (code > 0 && !(code == 5));
    }

    double ratio(float a, double b) {
        try {
            assert b != 0.0 : "zero";
            return a / b * 1.5f;
        } catch (ArithmeticException e) {
            return 0;
        } finally {
            count = ~count ^ 1 | 2 & 3;
        }
    }

    synchronized void reset() {
        synchronized (this) {
            count = 0;
        }
    }
}
"#;

// ============================================================================
// Single file
// ============================================================================

fn bench_parse_java(c: &mut Criterion) {
    c.bench_function("parse_java_medium", |b| {
        let interner = StringInterner::new();
        b.iter(|| {
            let arena = Bump::new();
            let parsed = parse_compilation_unit(&arena, &interner, "Inventory.java", black_box(JAVA_SOURCE));
            black_box(parsed.unit.types.len());
        });
    });
}

// ============================================================================
// Scaling
// ============================================================================

fn bench_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scaling");
    for methods in [10usize, 100, 1000] {
        let mut source = String::from("class Big {\n");
        for i in 0..methods {
            source.push_str(&format!("    int m{i}(int p) {{ int x = p * {i}; return x + 1; }}\n"));
        }
        source.push_str("}\n");
        group.bench_with_input(BenchmarkId::from_parameter(methods), &source, |b, source| {
            let interner = StringInterner::new();
            b.iter(|| {
                let arena = Bump::new();
                let parsed = parse_compilation_unit(&arena, &interner, "Big.java", black_box(source));
                black_box(parsed.unit.types.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_java, bench_parse_scaling);
criterion_main!(benches);
