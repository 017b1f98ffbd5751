use common::softmax::softmax;

use super::analytics::ActionWithPolicy;

/// Replaces raw policy logits with a temperature softmax taken over the given actions only.
pub fn update_logit_policies_to_softmax<A>(logit_policies: &mut [ActionWithPolicy<A>], temperature: f32) {
    let logits = logit_policies
        .iter()
        .map(|p| p.policy_score)
        .collect::<Vec<_>>();

    for (awp, policy) in logit_policies.iter_mut().zip(softmax(&logits, temperature)) {
        awp.policy_score = policy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_softmax_over_legal_actions_sums_to_one() {
        let mut policies = vec![
            ActionWithPolicy::new('a', 1.0),
            ActionWithPolicy::new('b', 2.0),
            ActionWithPolicy::new('c', 3.0),
        ];

        update_logit_policies_to_softmax(&mut policies, 0.5);

        let sum: f32 = policies.iter().map(|p| p.policy_score).sum();
        assert_approx_eq!(sum, 1.0, 0.01);
        assert_approx_eq!(policies[2].policy_score, 0.8668, 0.001);
        assert!(policies[0].policy_score < policies[1].policy_score);
    }
}
