//! Weighted categorical sampling without replacement
//!
//! Shared by the Monte-Carlo guess simulator and the turn simulator. Weights
//! live in a Fenwick tree, so a draw is a single branch-light descent over
//! the cumulative sums and removing an item is a logarithmic update.
//! Nothing allocates after construction: `reset` restores the initial
//! weights by copying.

use rand::Rng;

/// A pool of items drawn with probability proportional to their weight
#[derive(Debug, Clone)]
pub struct WeightedSampler<T> {
    items: Vec<T>,
    weights: Vec<f64>,
    /// 1-based Fenwick tree over `weights`
    tree: Vec<f64>,
    live: usize,
    initial_weights: Vec<f64>,
    initial_tree: Vec<f64>,
    initial_live: usize,
    top_bit: usize,
}

impl<T> WeightedSampler<T> {
    /// Build a sampler from `(item, weight)` pairs
    ///
    /// Negative and non-finite weights are clamped to zero.
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::solver::WeightedSampler;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut sampler = WeightedSampler::new([("a", 1.0), ("b", 0.0)]);
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// assert_eq!(sampler.take(&mut rng), Some((0, &"a")));
    /// assert_eq!(sampler.take(&mut rng), None);
    /// ```
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (items, weights): (Vec<T>, Vec<f64>) = entries
            .into_iter()
            .map(|(item, weight)| (item, sanitize(weight)))
            .unzip();

        let n = weights.len();
        let mut tree = vec![0.0; n + 1];
        tree[1..].copy_from_slice(&weights);
        for i in 1..=n {
            let parent = i + lowest_bit(i);
            if parent <= n {
                tree[parent] += tree[i];
            }
        }

        let live = weights.iter().filter(|&&w| w > 0.0).count();
        Self {
            items,
            initial_weights: weights.clone(),
            weights,
            initial_tree: tree.clone(),
            tree,
            live,
            initial_live: live,
            top_bit: n.checked_ilog2().map_or(0, |bit| 1 << bit),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn item(&self, index: usize) -> &T {
        &self.items[index]
    }

    #[must_use]
    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }

    /// Number of items with positive weight
    #[must_use]
    pub const fn live(&self) -> usize {
        self.live
    }

    /// Sum of all current weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        if self.live == 0 {
            return 0.0;
        }
        let mut sum = 0.0;
        let mut idx = self.items.len();
        while idx > 0 {
            sum += self.tree[idx];
            idx -= lowest_bit(idx);
        }
        sum
    }

    /// Replace the weight of one item
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_weight(&mut self, index: usize, weight: f64) {
        let weight = sanitize(weight);
        let old = self.weights[index];
        match (old > 0.0, weight > 0.0) {
            (true, false) => self.live -= 1,
            (false, true) => self.live += 1,
            _ => {}
        }

        self.weights[index] = weight;
        let delta = weight - old;
        let mut idx = index + 1;
        while idx < self.tree.len() {
            self.tree[idx] += delta;
            idx += lowest_bit(idx);
        }
    }

    /// Remove an item from the pool until the next `reset`
    pub fn remove(&mut self, index: usize) {
        self.set_weight(index, 0.0);
    }

    /// Restore every weight given at construction
    pub fn reset(&mut self) {
        self.weights.copy_from_slice(&self.initial_weights);
        self.tree.copy_from_slice(&self.initial_tree);
        self.live = self.initial_live;
    }

    /// Draw an index proportionally to the current weights, leaving it in the pool
    ///
    /// Returns `None` when no item has positive weight.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.live == 0 {
            return None;
        }
        let total = self.total_weight();
        if total <= 0.0 {
            return None;
        }

        let target = rng.random::<f64>() * total;
        let index = self.locate(target);
        Some(self.nearest_live(index))
    }

    /// Draw an item and remove it from the pool
    pub fn take<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, &T)> {
        let index = self.draw(rng)?;
        self.remove(index);
        Some((index, &self.items[index]))
    }

    /// Smallest index whose inclusive prefix sum exceeds `target`
    #[inline]
    fn locate(&self, mut target: f64) -> usize {
        let n = self.items.len();
        let mut pos = 0;
        let mut step = self.top_bit;
        while step > 0 {
            let next = pos + step;
            if next <= n && self.tree[next] <= target {
                pos = next;
                target -= self.tree[next];
            }
            step >>= 1;
        }
        pos.min(n - 1)
    }

    /// Rounding in the tree can land the descent on a removed item; step to a live neighbour
    fn nearest_live(&self, index: usize) -> usize {
        if self.weights[index] > 0.0 {
            return index;
        }
        (index + 1..self.weights.len())
            .chain((0..index).rev())
            .find(|&i| self.weights[i] > 0.0)
            .unwrap_or(index)
    }
}

#[inline]
const fn lowest_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[inline]
fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}
