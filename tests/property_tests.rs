use proptest::prelude::*;
use cinema_ticket_service::domain::error::{DomainError, PurchaseRejection};
use cinema_ticket_service::domain::model::{
    AccountId, Money, TicketPolicy, TicketPurchase, TicketType, TicketTypeRequest,
};

fn ticket_type_strategy() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// 上限25枚以内、幼児は大人以下となる (大人, 子供, 幼児) の組
fn valid_counts() -> impl Strategy<Value = (i64, i64, i64)> {
    (1i64..=25)
        .prop_flat_map(|adults| (Just(adults), 0..=adults.min(25 - adults)))
        .prop_flat_map(|(adults, infants)| {
            (Just(adults), 0..=(25 - adults - infants), Just(infants))
        })
}

fn to_requests(pairs: &[(TicketType, i64)]) -> Vec<TicketTypeRequest> {
    pairs
        .iter()
        .map(|(t, q)| TicketTypeRequest::new(*t, *q))
        .collect()
}

fn count(requests: &[TicketTypeRequest], ticket_type: TicketType) -> i64 {
    requests
        .iter()
        .filter(|r| r.ticket_type() == ticket_type)
        .map(|r| r.quantity())
        .sum()
}

fn purchase(
    requests: &[TicketTypeRequest],
    policy: &TicketPolicy,
) -> Result<TicketPurchase, DomainError> {
    TicketPurchase::new(AccountId::new(1).unwrap(), requests, policy)
}

// 有効な購入のプロパティベーステスト
proptest! {
    /// 有効な購入の金額は 大人×25 + 子供×15、座席数は 大人 + 子供
    #[test]
    fn test_valid_purchase_amount_and_seats(
        (adults, children, infants) in valid_counts(),
    ) {
        let requests = [
            TicketTypeRequest::new(TicketType::Adult, adults),
            TicketTypeRequest::new(TicketType::Child, children),
            TicketTypeRequest::new(TicketType::Infant, infants),
        ];
        let purchase = purchase(&requests, &TicketPolicy::default()).unwrap();

        prop_assert_eq!(purchase.total_amount(), Money::gbp(adults * 25 + children * 15));
        prop_assert_eq!(purchase.total_seats(), (adults + children) as u32);
        prop_assert_eq!(purchase.total_tickets(), (adults + children + infants) as u32);
    }

    /// リクエストの順序は結果に影響しない
    #[test]
    fn test_request_order_does_not_matter(
        pairs in prop::collection::vec((ticket_type_strategy(), 0i64..6), 1..8),
    ) {
        let forward = to_requests(&pairs);
        let mut backward = forward.clone();
        backward.reverse();

        let policy = TicketPolicy::default();
        prop_assert_eq!(
            purchase(&forward, &policy).map(|p| (p.total_amount(), p.total_seats())),
            purchase(&backward, &policy).map(|p| (p.total_amount(), p.total_seats()))
        );
    }

    /// 単価がどれほど大きくても、正確な金額か桁あふれエラーのどちらかになる
    #[test]
    fn test_any_price_gives_exact_amount_or_overflow(
        (adults, children, infants) in valid_counts(),
        adult_price in 0i64..=i64::MAX,
        child_price in 0i64..=i64::MAX,
    ) {
        let policy = TicketPolicy {
            adult_price: Money::gbp(adult_price),
            child_price: Money::gbp(child_price),
            ..TicketPolicy::default()
        };
        let requests = [
            TicketTypeRequest::new(TicketType::Adult, adults),
            TicketTypeRequest::new(TicketType::Child, children),
            TicketTypeRequest::new(TicketType::Infant, infants),
        ];

        let expected = i128::from(adults) * i128::from(adult_price)
            + i128::from(children) * i128::from(child_price);
        match purchase(&requests, &policy) {
            Ok(p) => prop_assert_eq!(i128::from(p.total_amount().amount()), expected),
            Err(err) => {
                prop_assert_eq!(err, DomainError::AmountOverflow);
                prop_assert!(expected > i128::from(i64::MAX));
            }
        }
    }
}

// 無効な購入のプロパティベーステスト
proptest! {
    /// 合計枚数が上限を超える購入は常に拒否される
    #[test]
    fn test_over_limit_always_rejected(
        pairs in prop::collection::vec((ticket_type_strategy(), 0i64..40), 1..10),
    ) {
        let requests = to_requests(&pairs);
        let total: i64 = requests.iter().map(|r| r.quantity()).sum();
        prop_assume!(total > 25);

        prop_assert_eq!(
            purchase(&requests, &TicketPolicy::default()),
            Err(DomainError::InvalidPurchase(PurchaseRejection::TooManyTickets))
        );
    }

    /// 桁あふれするほど大きな枚数も上限超過として拒否される
    #[test]
    fn test_huge_quantities_rejected_as_too_many(
        pairs in prop::collection::vec((ticket_type_strategy(), 26i64..=i64::MAX), 1..5),
    ) {
        prop_assert_eq!(
            purchase(&to_requests(&pairs), &TicketPolicy::default()),
            Err(DomainError::InvalidPurchase(PurchaseRejection::TooManyTickets))
        );
    }

    /// 負の枚数が1つでも含まれる購入は拒否される
    #[test]
    fn test_any_negative_quantity_rejected(
        valid in prop::collection::vec((ticket_type_strategy(), 0i64..5), 0..5),
        negative_type in ticket_type_strategy(),
        negative in i64::MIN..0,
    ) {
        let mut requests = to_requests(&valid);
        requests.push(TicketTypeRequest::new(negative_type, negative));

        prop_assert_eq!(
            purchase(&requests, &TicketPolicy::default()),
            Err(DomainError::InvalidPurchase(PurchaseRejection::NegativeQuantity))
        );
    }

    /// 幼児が大人より多い購入は拒否される
    #[test]
    fn test_infants_never_exceed_adults(
        pairs in prop::collection::vec((ticket_type_strategy(), 0i64..5), 1..6),
    ) {
        let requests = to_requests(&pairs);

        if let Ok(purchase) = purchase(&requests, &TicketPolicy::default()) {
            prop_assert!(purchase.infant_tickets() <= purchase.adult_tickets());
            prop_assert!(purchase.adult_tickets() > 0);
            prop_assert_eq!(
                i64::from(purchase.adult_tickets()),
                count(&requests, TicketType::Adult)
            );
        }
    }

    /// 0以下のアカウントIDは常に拒否される
    #[test]
    fn test_non_positive_account_id_rejected(raw in i64::MIN..=0) {
        prop_assert_eq!(
            AccountId::new(raw),
            Err(DomainError::InvalidPurchase(PurchaseRejection::InvalidAccountId))
        );
    }
}
