// Tests for polarity scoring and sign-based sentiment classification

use speech_coach::{LexiconSentiment, Sentiment, SentimentModel};

#[test]
fn test_positive_text_scores_positive() {
    let model = LexiconSentiment::new();

    let score = model.polarity("This was a wonderful and exciting day");
    assert!(score > 0.0, "Expected positive polarity, got {}", score);
    assert_eq!(Sentiment::from_polarity(score), Sentiment::Positive);
}

#[test]
fn test_negative_text_scores_negative() {
    let model = LexiconSentiment::new();

    let score = model.polarity("It was a terrible, disappointing failure and I hated it");
    assert!(score < 0.0, "Expected negative polarity, got {}", score);
    assert_eq!(Sentiment::from_polarity(score), Sentiment::Negative);
}

#[test]
fn test_neutral_text_scores_zero() {
    let model = LexiconSentiment::new();

    let score = model.polarity("The train departs at seven from platform two");
    assert_eq!(score, 0.0);
    assert_eq!(Sentiment::from_polarity(score), Sentiment::Neutral);
}

#[test]
fn test_balanced_text_is_neutral() {
    let model = LexiconSentiment::new();

    // One positive hit and one negative hit cancel out
    let score = model.polarity("The food was good but the service was bad");
    assert_eq!(score, 0.0);
    assert_eq!(Sentiment::from_polarity(score), Sentiment::Neutral);
}

#[test]
fn test_polarity_is_normalized() {
    let model = LexiconSentiment::new();

    let score = model.polarity("great great great awful");
    assert!(score > 0.0 && score <= 1.0);
}

#[test]
fn test_classification_from_sign() {
    assert_eq!(Sentiment::from_polarity(0.01), Sentiment::Positive);
    assert_eq!(Sentiment::from_polarity(-0.01), Sentiment::Negative);
    assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
}

#[test]
fn test_labels() {
    assert_eq!(Sentiment::Positive.label(), "Positive");
    assert_eq!(Sentiment::Negative.label(), "Negative");
    assert_eq!(Sentiment::Neutral.label(), "Neutral");
}
