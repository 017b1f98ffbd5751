// (exp(p-max_p))^(1/T) = exp((p-max_p)/T).
pub fn softmax(logits: &[f32], temperature: f32) -> Vec<f32> {
    if logits.is_empty() {
        return Vec::new();
    }

    let max_p = logits.iter().cloned().fold(f32::MIN, f32::max);
    let exps = logits
        .iter()
        .map(|&p| ((p - max_p) / temperature).exp())
        .collect::<Vec<_>>();
    let sum = exps.iter().sum::<f32>();

    exps.into_iter().map(|p| p / sum).collect()
}
