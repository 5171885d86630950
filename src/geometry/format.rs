/// `f64` の正確な10進展開を得るのに十分な小数桁数
///
/// 非正規化数の最小値でも小数点以下 1074 桁で表し切れる。
const EXACT_DIGITS: usize = 1074;

/// これ以上の絶対値は固定小数点ではなく指数表記にする
const EXPONENT_THRESHOLD: f64 = 1e21;

/// `value` を小数点以下 `precision` 桁の固定小数点表記にする。
///
/// 丸めは `value` の正確な10進値に対して行い、ちょうど中間の場合は0から遠い方へ丸める。
/// `value` が負であれば、丸めた結果が0でも符号を残す。`-0.0` は符号なしで表記する。
/// 絶対値が `1e21` 以上の場合は桁数を指定せず `1e+21` のような指数表記を返す。
pub(crate) fn to_fixed(value: f64, precision: usize) -> String {
    if value.abs() >= EXPONENT_THRESHOLD {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(precision))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(precision)
        .is_some_and(|&b| b >= b'5');

    let mut int_len = int_part.len();
    if round_up && increment(&mut digits) {
        digits.insert(0, 1);
        int_len += 1;
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// 10進の桁列に1を加える。最上位から桁あふれした場合は `true` を返す。
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
